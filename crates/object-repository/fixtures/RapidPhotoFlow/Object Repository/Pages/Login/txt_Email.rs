<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Email input field on login page</description>
   <name>txt_Email</name>
   <tag></tag>
   <elementGuidId>login-email-input</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//input[@type='email' and @placeholder='Email']</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>input[type='email'][placeholder='Email']</value>
      </entry>
      <entry>
         <key>BASIC</key>
         <value>//input[@type='email']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
